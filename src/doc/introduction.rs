/*!
# Introductory Tutorial for Tiny BASIC

Start the executable from a terminal. The optional argument names the
directory that `SAVE` and `LOAD` use. If you get the following, you are
ready for this tutorial. Type CTRL-D to leave, or enter `BYE`.
<pre><code>&nbsp;  Tiny BASIC
&nbsp;      15K Memory
&nbsp;  READY
&nbsp;> █
</code></pre>

Stop a running program with CTRL-C.

Anything typed without a line number runs immediately. Lower case is
accepted; everything outside of quotes is converted to upper case.

<pre><code>&nbsp;> print "Hello World"
&nbsp;  Hello World
&nbsp;  READY
</code></pre>

Typing a line number first stores the line as part of the program
instead. Lines are kept in order no matter what order you type them in.
Typing a line number with nothing after it deletes that line.

<pre><code>&nbsp;> 20 print "World"
&nbsp;> 10 print "Hello ";
&nbsp;> list
&nbsp;     10 PRINT "Hello ";
&nbsp;     20 PRINT "World"
&nbsp;> run
&nbsp;  Hello World
</code></pre>

To edit a line, type its number and press TAB.

There are 26 variables, `A` through `Z`. They hold whole numbers or
decimals and start at zero. `RUN` and `CLEAR` set them all back to zero.

<pre><code>&nbsp;> a = 10 / 4 : print a, a * 2
&nbsp;  2.5 5
</code></pre>

Division that comes out even stays a whole number. `%` is the remainder,
with the sign of the divisor. Comparisons give 1 for true and 0 for false.

<pre><code>&nbsp;> print 2 + 3 * 4, (2 + 3) * 4, 1 < 2
&nbsp;  14 20 1
</code></pre>

`TICKS` counts milliseconds since start up and `TICKSPERSEC` is 1000,
so a program can time itself.

<pre><code>&nbsp;> 10 t = ticks
&nbsp;> 20 input n
&nbsp;> 30 print "That took ", (ticks - t) / tickspersec, " seconds"
</code></pre>

*/
